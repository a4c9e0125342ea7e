//! HTML rendering of the score page.
//!
//! The page is one self-contained document: styles, the client script and the
//! grid. The client refreshes by fetching `/` and swapping the document in place.

use std::fmt::{self, Write};

use service::ScoreView;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
    <title>Farkle Score</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            text-align: center;
            padding: 10px;
            max-width: 390px;
            margin: auto;
        }
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th, td {
            border: 1px solid black;
            padding: 10px;
            text-align: center;
        }
        input {
            width: 90%;
            font-size: 16px;
            padding: 5px;
        }
        button {
            font-size: 16px;
            padding: 10px;
            width: 100%;
        }
        #playerPopup {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            background: rgba(0, 0, 0, 0.5);
            display: none;
            align-items: center;
            justify-content: center;
        }
        #playerPopup > div {
            background: white;
            padding: 20px;
            border-radius: 10px;
        }
        .links { margin-top: 12px; }
    </style>
    <script>
        async function addPlayer() {
            let names = document.getElementById("player").value
                .split(",")
                .map(name => name.trim())
                .filter(name => name.length > 0);
            for (let player of names) {
                await fetch("/add_player", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify({ player: player })
                });
            }
            await updateTable();
            closePlayerPopup();
        }

        function makeCellEditable(cell) {
            if (cell.querySelector("input")) {
                return;
            }
            let player = cell.dataset.player;
            let round = parseInt(cell.dataset.round);
            let oldValue = cell.innerText.trim();
            let input = document.createElement("input");
            input.type = "text";
            input.inputMode = "numeric";
            input.pattern = "[0-9]*";
            input.value = oldValue;
            input.style.width = "50px";
            input.onblur = async function() {
                let newScore = parseInt(input.value);
                if (!isNaN(newScore) && newScore >= 0) {
                    await fetch("/add_score", {
                        method: "POST",
                        headers: { "Content-Type": "application/json" },
                        body: JSON.stringify({ player: player, score: newScore, round: round })
                    });
                    await updateTable();
                } else {
                    cell.innerText = oldValue;
                }
            };
            input.onkeypress = function(event) {
                if (event.key === "Enter") {
                    input.blur();
                }
            };
            cell.innerText = "";
            cell.appendChild(input);
            input.focus();
        }

        async function updateTable() {
            let response = await fetch("/");
            let text = await response.text();
            document.documentElement.innerHTML = text;
        }

        function openPlayerPopup() {
            document.getElementById("playerPopup").style.display = "flex";
        }

        function closePlayerPopup() {
            document.getElementById("playerPopup").style.display = "none";
            document.getElementById("player").value = "";
        }

        function resetGame() {
            fetch("/reset").then(() => location.reload());
        }
    </script>
</head>
"#;

const POPUP: &str = r#"    <div id="playerPopup">
        <div>
            <h3>Add Player Names as Comma Separated List</h3>
            <input type="text" id="player" placeholder="Enter player names (comma-separated)">
            <button onclick="addPlayer()">Start Game</button>
        </div>
    </div>
"#;

const FOOTER: &str = r#"    <button onclick="resetGame()" style="margin-top: 20px;">Reset Game</button>
    <div class="links">
        <a href="/rules.pdf">Rules</a> | <a href="/scoring.jpeg">Scoring</a>
    </div>
</body>
</html>
"#;

/// Render the full page for a board snapshot.
///
/// Besides the view's rows, one blank entry row follows the last round so the
/// grid can always grow by one.
pub fn render_page(view: &ScoreView) -> String {
    let mut html = String::with_capacity(HEAD.len() + 4096);
    html.push_str(HEAD);
    html.push_str("<body onload=\"openPlayerPopup()\">\n");
    html.push_str(POPUP);

    html.push_str("    <table>\n        <tr>\n            <th>Round</th>\n");
    for player in &view.players {
        push_line(&mut html, format_args!("            <th>{}</th>", escape_html(player)));
    }
    html.push_str("        </tr>\n");

    for row in &view.rows {
        push_line(&mut html, format_args!("        <tr>\n            <td>{}</td>", row.round + 1));
        for (player, cell) in view.players.iter().zip(&row.cells) {
            let value = cell.map(|v| v.to_string()).unwrap_or_default();
            push_score_cell(&mut html, player, row.round, &value);
        }
        html.push_str("        </tr>\n");
    }

    let entry_round = view.max_rounds;
    push_line(&mut html, format_args!("        <tr>\n            <td>{}</td>", entry_round + 1));
    for player in &view.players {
        push_score_cell(&mut html, player, entry_round, "");
    }
    html.push_str("        </tr>\n");

    html.push_str("        <tr>\n            <td><strong>Total</strong></td>\n");
    for total in &view.totals {
        push_line(&mut html, format_args!("            <td><strong>{}</strong></td>", total.display));
    }
    html.push_str("        </tr>\n    </table>\n");

    html.push_str(FOOTER);
    html
}

/// Append formatted text plus a newline; writing into a `String` cannot fail.
fn push_line(html: &mut String, args: fmt::Arguments<'_>) {
    html.write_fmt(args).ok();
    html.push('\n');
}

fn push_score_cell(html: &mut String, player: &str, round: usize, value: &str) {
    push_line(
        html,
        format_args!(
            "            <td class=\"score\" data-player=\"{}\" data-round=\"{}\" \
             onclick=\"makeCellEditable(this)\">{}</td>",
            escape_html(player),
            round,
            value
        ),
    );
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::Scoreboard;

    fn round_rows(html: &str) -> usize {
        html.matches("<tr>").count() - 2
    }

    #[test]
    fn empty_board_has_default_rows_plus_entry_row() {
        let html = render_page(&Scoreboard::new().render());
        assert_eq!(round_rows(&html), 11);
        assert!(html.contains("<td>10</td>"));
        assert!(html.contains("<td>11</td>"));
        assert!(!html.contains("<td>12</td>"));
        assert!(!html.contains("class=\"score\""));
    }

    #[test]
    fn cells_and_totals_are_rendered() {
        let mut board = Scoreboard::new();
        board.add_player("alice");
        for s in [500, 0, 1000] {
            board.set_score("alice", None, s).unwrap();
        }
        let html = render_page(&board.render());

        assert!(html.contains("<th>alice</th>"));
        assert!(html.contains("data-player=\"alice\" data-round=\"0\" onclick=\"makeCellEditable(this)\">500</td>"));
        assert!(html.contains("data-round=\"1\" onclick=\"makeCellEditable(this)\">0</td>"));
        assert!(html.contains("data-round=\"3\" onclick=\"makeCellEditable(this)\"></td>"));
        // the entry row addresses round index 10
        assert!(html.contains("data-round=\"10\""));
        assert!(html.contains("<td><strong>1,500</strong></td>"));
    }

    #[test]
    fn player_names_are_escaped() {
        let mut board = Scoreboard::new();
        board.add_player("<b>\"Bo\" & 'Al'</b>");
        let html = render_page(&board.render());
        assert!(html.contains("<th>&lt;b&gt;&quot;Bo&quot; &amp; &#39;Al&#39;&lt;/b&gt;</th>"));
        assert!(!html.contains("<b>\"Bo\""));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Player 1"), "Player 1");
        assert_eq!(escape_html(""), "");
    }
}
