//! Built-in ANSI art payloads
//!
//! Every design takes an optional caption (empty string for none) and
//! renders a terminal string using 256-color SGR escapes. Widths below are
//! visible character counts; escape sequences take no columns.

use clap::ValueEnum;

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Design {
    /// Six-stripe rainbow flag spelling LOVE
    RainbowLove,
    /// Green-on-black digital rain
    Matrix,
    /// A DIP microchip with the caption on its label
    Chip,
    /// Box-drawn terminal HUD with a glider
    GliderCcc,
    /// Red warning banner
    Warning,
    /// Small rocket with exhaust
    Rocket,
    /// Synthwave sunset over a neon grid
    RetroSynthwave,
    /// Night view of the Haus des Lehrers with lit windows
    Blinkenlights,
    /// Imitation key listing followed by an unterminated OSC
    FakeKeySummary,
    /// The caption alone
    Text,
}

impl Design {
    /// Registry name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Design::RainbowLove => "rainbow-love",
            Design::Matrix => "matrix",
            Design::Chip => "chip",
            Design::GliderCcc => "glider-ccc",
            Design::Warning => "warning",
            Design::Rocket => "rocket",
            Design::RetroSynthwave => "retro-synthwave",
            Design::Blinkenlights => "blinkenlights",
            Design::FakeKeySummary => "fake-key-summary",
            Design::Text => "text",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Design::RainbowLove => "six-stripe rainbow flag spelling LOVE",
            Design::Matrix => "green-on-black digital rain",
            Design::Chip => "a DIP microchip with the caption on its label",
            Design::GliderCcc => "box-drawn terminal HUD with a glider",
            Design::Warning => "red warning banner",
            Design::Rocket => "small rocket with exhaust",
            Design::RetroSynthwave => "synthwave sunset over a neon grid",
            Design::Blinkenlights => "Haus des Lehrers facade with a window matrix",
            Design::FakeKeySummary => "imitation key listing that hides what follows",
            Design::Text => "the caption alone",
        }
    }

    /// Render the design with `caption` (empty for none).
    pub fn render(self, caption: &str) -> String {
        match self {
            Design::RainbowLove => rainbow_love(caption),
            Design::Matrix => matrix(caption),
            Design::Chip => chip(caption),
            Design::GliderCcc => glider_ccc(caption),
            Design::Warning => warning(caption),
            Design::Rocket => rocket(caption),
            Design::RetroSynthwave => retro_synthwave(caption),
            Design::Blinkenlights => blinkenlights(caption),
            Design::FakeKeySummary => fake_key_summary(caption),
            Design::Text => format!("{}\n", caption),
        }
    }
}

/// All built-in designs as `(name, description)` pairs.
pub fn registry() -> Vec<(&'static str, &'static str)> {
    Design::value_variants()
        .iter()
        .map(|d| (d.name(), d.description()))
        .collect()
}

/// Visible width of `s`, skipping CSI escape sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Trailer shared by most designs: the caption on its own line, or a bare newline.
fn caption_line(caption: &str) -> String {
    if caption.is_empty() {
        "\n".to_string()
    } else {
        format!("{}\n", caption)
    }
}

fn rainbow_love(caption: &str) -> String {
    const WIDTH: usize = 44;
    const STRIPES: [(&str, &str); 6] = [
        ("\x1b[48;5;196m", ""),
        ("\x1b[48;5;208m", "L"),
        ("\x1b[48;5;226m", "O"),
        ("\x1b[48;5;46m", "V"),
        ("\x1b[48;5;21m", "E"),
        ("\x1b[48;5;93m", ""),
    ];
    let txt_color = "\x1b[38;5;255;1m";

    let rows: Vec<String> = STRIPES
        .iter()
        .map(|&(bg, letter)| {
            if letter.is_empty() {
                format!("{bg}{}{RESET}", spaces(WIDTH))
            } else {
                let pad_total = WIDTH - letter.len();
                let left = pad_total / 2;
                let right = pad_total - left;
                format!(
                    "{bg}{}{txt_color}{letter}{bg}{}{RESET}",
                    spaces(left),
                    spaces(right)
                )
            }
        })
        .collect();

    let mut art = format!("\n{}", rows.join("\n"));
    if caption.is_empty() {
        art.push('\n');
    } else {
        art.push_str(&format!("\n{}\n", caption));
    }
    art
}

fn matrix(caption: &str) -> String {
    const WIDTH: usize = 44;
    const RAIN: [&str; 5] = [
        " 0  1  0  1  0  1  1  0  1  0  1  0  1  1 ",
        " 1  0  1  1  0  0  1  0  1  1  0  0  1  0 ",
        " 0  1  0  0  1  0  1  0  0  1  0  1  0  1 ",
        " 1  0  1  1  0  1  0  1  1  0  1  0  1  0 ",
        " 0  1  0  1  0  0  1  0  1  0  0  1  0  1 ",
    ];
    let green = "\x1b[38;5;46m";
    let black_bg = "\x1b[48;5;16m";

    let header_text = " [ SYSTEM ENCRYPTED ] ";
    let pad = spaces((WIDTH - header_text.len()) / 2);
    let mut rows = vec![format!("{black_bg}{green}{pad}{header_text}{pad}{RESET}")];

    for line in RAIN {
        let pad_total = WIDTH - line.len();
        let left = pad_total / 2;
        let right = pad_total - left;
        rows.push(format!(
            "{black_bg}{green}{}{line}{}{RESET}",
            spaces(left),
            spaces(right)
        ));
    }

    let mut art = format!("\n{}", rows.join("\n"));
    if caption.is_empty() {
        art.push('\n');
    } else {
        art.push_str(&format!("\n{black_bg}{green} > {caption} {RESET}\n"));
    }
    art
}

fn chip(caption: &str) -> String {
    const INNER: usize = 20;
    let c_sil = "\x1b[38;5;236m";
    let c_pin = "\x1b[38;5;250m";
    let c_trc = "\x1b[38;5;46m";
    let c_lbl = "\x1b[38;5;255m";
    let pad = "  ";

    let row = |color: &str, text: &str| -> String {
        let text: String = text.chars().take(INNER).collect();
        let needed = INNER - text.chars().count();
        let left = needed / 2;
        let right = needed - left;
        format!(
            "{pad}   {c_pin}|{c_sil}{}{color}{text}{c_sil}{}{c_pin}|{RESET}",
            spaces(left),
            spaces(right)
        )
    };

    let label = if caption.is_empty() {
        "PGP SECURE"
    } else {
        caption
    };

    let lines = [
        format!("{pad}      {c_trc}|  |  |  |  |  |{RESET}"),
        format!("{pad}    {c_pin}__H__H__H__H__H__H__{RESET}"),
        format!("{pad}   {c_pin}|{c_sil}____________________{c_pin}|{RESET}"),
        row("", ""),
        row(c_lbl, "M O T O R O L A"),
        row(c_trc, "MC68000L8"),
        row("", ""),
        row(c_lbl, label),
        row(c_trc, "0xDEADBEEF"),
        row("", ""),
        format!("{pad}   {c_pin}|{c_sil}____________________{c_pin}|{RESET}"),
        format!("{pad}      {c_pin}T  T  T  {c_sil}U{c_pin}  T  T{RESET}"),
        format!("{pad}      {c_trc}|  |  |  |  |  |{RESET}"),
    ];

    format!("\n{}\n", lines.join("\n"))
}

fn glider_ccc(caption: &str) -> String {
    // Interior between the borders is 58 columns: one leading space + 57.
    const INTERIOR: usize = 57;
    let cyan = "\x1b[38;5;51m";
    let pink = "\x1b[38;5;201m";
    let green = "\x1b[38;5;46m";
    let gray = "\x1b[38;5;244m";

    let wrap = |content: String| -> String {
        let fill = spaces(INTERIOR.saturating_sub(visible_width(&content)));
        format!("{gray}│{RESET} {content}{fill}{gray}│{RESET}\n")
    };

    let top = format!(
        "{gray}┌─── {pink}[ CHAOS COMPUTER CLUB ]{gray} {}┐{RESET}\n",
        "─".repeat(30)
    );
    let mid = format!("{gray}├{}┤{RESET}\n", "─".repeat(58));
    let bot = format!("{gray}└{}┘{RESET}\n", "─".repeat(58));

    let body = [
        wrap(format!(
            "{cyan}STATUS:{RESET} EXPLOIT_ACTIVE    {cyan}NODE:{RESET} HAMBURG_C3"
        )),
        wrap(format!(
            "{cyan}TARGET:{RESET} PGP_KEY_INJECT    {cyan}AUTH:{RESET} ROOT"
        )),
        mid,
        wrap(format!(
            "{pink}[ GLIDER.EXE ]{RESET}          {pink}[ BINARY_STREAM ]{RESET}"
        )),
        wrap(format!("    {green}· ▄ ·{RESET}               01000011  (C)")),
        wrap(format!("    {green}· · ▄{RESET}               01000011  (C)")),
        wrap(format!("    {green}▄ ▄ ▄{RESET}               01000011  (C)")),
        wrap(format!("{gray}>> Packet injection successful...{RESET}")),
    ];

    format!("\n{top}{}{bot}{}", body.concat(), caption_line(caption))
}

fn warning(caption: &str) -> String {
    let line = format!("\x1b[41m\x1b[97m DANGER: UNAUTHORIZED ACCESS {RESET}");
    format!("\n{line}\n{}", caption_line(caption))
}

fn rocket(caption: &str) -> String {
    let c_body = "\x1b[38;5;255m";
    let c_acc = "\x1b[38;5;196m";
    let c_fire = "\x1b[38;5;208m";
    let c_gry = "\x1b[38;5;240m";
    let pad = "   ";

    let lines = [
        format!("{pad}      {c_acc}/{c_acc}\\{RESET}"),
        format!("{pad}     {c_body}/{c_acc}__\\{RESET}"),
        format!("{pad}     {c_body}|  |{RESET}"),
        format!("{pad}     {c_body}|{c_acc}C{c_body} |{RESET}"),
        format!("{pad}     {c_body}|{c_acc}C{c_body} |{RESET}"),
        format!("{pad}     {c_body}|{c_acc}C{c_body} |{RESET}"),
        format!("{pad}     {c_body}|__|{RESET}"),
        format!("{pad}    {c_acc}/{c_body}|  |{c_acc}\\{RESET}"),
        format!("{pad}   {c_acc}/{c_acc}_|  |_{c_acc}\\{RESET}"),
        format!("{pad}     {c_gry}/  \\{RESET}"),
        format!("{pad}     {c_fire}vvvv{RESET}"),
        format!("{pad}     {c_fire}(  ){RESET}"),
        format!("{pad}     {c_fire} \\/{RESET}"),
        format!("{pad}      {c_fire}||{RESET}"),
        format!("{pad} {c_gry}[ FAIRY DUST ]{RESET}"),
    ];

    let mut art = format!("\n{}", lines.join("\n"));
    if caption.is_empty() {
        art.push('\n');
    } else {
        // The caption continues the mission label line.
        art.push_str(&format!("{pad} {c_acc}>> {caption}{RESET}\n"));
    }
    art
}

fn retro_synthwave(caption: &str) -> String {
    const WIDTH: usize = 60;
    let sky = "\x1b[48;5;232m";
    let sun_1 = "\x1b[48;5;226m";
    let sun_2 = "\x1b[48;5;214m";
    let sun_3 = "\x1b[48;5;202m";
    let sun_4 = "\x1b[48;5;196m";
    let neon_p = "\x1b[48;5;201m";
    let neon_c = "\x1b[48;5;51m";
    let grid = "\x1b[48;5;18m";

    let line = |content: String| format!("{content}{RESET}\n");
    let sun = |color: &str, side: usize| {
        line(format!(
            "{sky}{}{color}{}{sky}{}",
            spaces(side),
            spaces(WIDTH - 2 * side),
            spaces(side)
        ))
    };
    let grid_row = |segments: [usize; 5]| {
        let mut row = String::new();
        for (i, len) in segments.into_iter().enumerate() {
            if i > 0 {
                row.push_str(neon_c);
                row.push_str("  ");
            }
            row.push_str(grid);
            row.push_str(&spaces(len));
        }
        line(row)
    };

    let parts = [
        sun(sun_1, 22),
        sun(sun_2, 18),
        sun(sun_2, 15),
        line(format!("{sky}{}", spaces(WIDTH))),
        sun(sun_3, 13),
        sun(sun_4, 12),
        line(format!("{neon_p}{}", spaces(WIDTH))),
        grid_row([12, 10, 10, 10, 10]),
        line(format!("{neon_c}{}", spaces(WIDTH))),
        grid_row([8, 12, 16, 12, 4]),
    ];

    format!("\n{}{}", parts.concat(), caption_line(caption))
}

fn blinkenlights(caption: &str) -> String {
    // Interior of the facade is 10 windows of 3 columns each.
    const INTERIOR: usize = 30;
    const WINDOWS: [[u8; 10]; 12] = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 1, 1, 1, 0, 0, 0],
        [0, 0, 1, 1, 2, 0, 1, 1, 0, 0],
        [0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 2, 0, 0, 0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 0, 0, 0, 0, 0, 2, 0],
        [0, 1, 2, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 1, 2, 0, 1, 1, 0, 0],
        [0, 0, 0, 1, 1, 1, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [2, 0, 1, 0, 0, 0, 0, 1, 0, 2],
    ];
    let c_frame = "\x1b[38;5;238m";
    let c_void = "\x1b[48;5;234m";
    let w_off = "\x1b[48;5;232m";
    let w_dim = "\x1b[48;5;214m";
    let w_lit = "\x1b[48;5;226m";
    let l_bg = "\x1b[48;5;226m";
    let l_fg = "\x1b[38;5;16m";

    let line = |content: String| format!("{content}{RESET}\n");
    let window = |state: u8| {
        let color = match state {
            1 => w_lit,
            2 => w_dim,
            _ => w_off,
        };
        format!("{color}  {c_void} ")
    };
    let rule = "─".repeat(INTERIOR);

    let mut lines = vec![
        line(format!(
            " {}{c_frame}┌──────┐{}{c_frame}┌──────┐",
            spaces(3),
            spaces(10)
        )),
        line(format!(" {c_frame}┌──┴──────┴──────────┴──────┴──┐")),
    ];
    for states in WINDOWS {
        let row: String = states.into_iter().map(&window).collect();
        lines.push(line(format!(" {c_frame}│{c_void}{row}{c_frame}│")));
        lines.push(line(format!(" {c_frame}├{rule}┤")));
    }

    let pad = format!("{c_void}{}", spaces(5));
    lines.push(line(format!(
        " {c_frame}│{pad}{l_bg}{l_fg}[ HAUS DES LEHRERS ]{c_void}{pad}{c_frame}│"
    )));
    lines.push(line(format!(" {c_frame}└{rule}┘")));

    format!("\n{}{}", lines.concat(), caption_line(caption))
}

fn fake_key_summary(caption: &str) -> String {
    // An unterminated OSC swallows the rest of the terminal output.
    const UNTERMINATED_OSC: &str = "\x1b]";
    if caption.is_empty() {
        format!(
            "pub   ed25519 2026-01-02 [SC]\n      \
             FAKE0123456789ABCDEF0123456789ABCDEF0123\n\
             uid           default fake key summary <fake@wonderland>\n\
             sub   cv25519 2063-04-05 [E]\n\
             {UNTERMINATED_OSC}"
        )
    } else {
        format!("{caption}\n{UNTERMINATED_OSC}")
    }
}
