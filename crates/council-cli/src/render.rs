use council_core::election::screen::{MANIFESTOS_HEADING, VOTES_HEADING};
use council_core::{Button, DisplayConfig, Screen};

/// Lay a screen out as plain terminal text. A blank screen is an empty string.
pub fn to_text(screen: &Screen, display: &DisplayConfig) -> String {
    let rule = "-".repeat(display.rule_width());
    let mut out = Vec::new();

    match screen {
        Screen::CallToAction { title, lines, start } => {
            out.push(title.to_string());
            out.push(rule);
            out.extend(lines.iter().map(|l| l.to_string()));
            out.push(String::new());
            out.push(button(start));
        }
        Screen::Progress { title, caption } => {
            out.push(title.to_string());
            out.push(rule);
            out.push("...".to_string());
            out.push(caption.to_string());
        }
        Screen::Results {
            title,
            headline,
            winner,
            manifestos,
            votes,
            closing,
            proceed,
        } => {
            out.push(title.to_string());
            out.push(rule.clone());
            if display.show_trophy {
                out.push(format!("🏆 {} {}", headline, winner));
            } else {
                out.push(format!("{} {}", headline, winner));
            }
            out.push(String::new());

            out.push(MANIFESTOS_HEADING.to_string());
            for card in manifestos {
                let marker = if card.is_winner { "*" } else { " " };
                out.push(format!("{} {}: \"{}\"", marker, card.model, card.manifesto));
            }
            out.push(String::new());

            out.push(VOTES_HEADING.to_string());
            out.extend(votes.iter().map(|v| format!("  {}", v)));
            out.push(String::new());

            out.push(rule);
            out.push(closing.to_string());
            out.push(button(proceed));
        }
        Screen::Nothing => return String::new(),
    }

    out.join("\n")
}

fn button(b: &Button) -> String {
    if b.enabled {
        format!("[ {} ]", b.label)
    } else {
        format!("[ {} ] (disabled)", b.label)
    }
}
