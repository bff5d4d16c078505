use concat_string::concat_string;

use crate::animals::Animal;

/// Widest a bubble interior may be, horizontal padding included.
pub const MAX_LINE_LENGTH: usize = 32;

/// Blank lines above and below the message inside the bubble.
pub const VERTICAL_PADDING: usize = 1;

/// Spaces between the message and the bubble's side borders.
pub const HORIZONTAL_PADDING: usize = 1;

/// Offset of the bubble from the left edge of the terminal.
pub const HORIZONTAL_MARGIN: usize = 2;

/// Blank lines between the bubble and the animal.
pub const VERTICAL_MARGIN: usize = 1;

/// Every output line ends in CRLF, whatever the host platform uses.
const CRLF: &str = "\r\n";

/// Wrap and pad a message, then draw the whole scene for `animal`.
pub fn say(message: &str, animal: &Animal, imagine: bool) -> String {
    let (lines, line_length) = layout(
        message,
        MAX_LINE_LENGTH - 2 * HORIZONTAL_PADDING,
        HORIZONTAL_PADDING,
        VERTICAL_PADDING,
    );
    render(&lines, line_length, animal, imagine)
}

/// Word-wrap `message` to `max_content` columns and pad the result. Returns
/// the padded lines together with their shared width: the longest wrapped
/// line plus padding on both sides, so a short message gets a narrow bubble.
pub fn layout(
    message: &str,
    max_content: usize,
    h_pad: usize,
    v_pad: usize,
) -> (Vec<String>, usize) {
    let wrapped = wrap(message, max_content);
    let line_length = wrapped.iter().map(|line| line.len()).max().unwrap_or(0) + 2 * h_pad;

    let pad = " ".repeat(h_pad);
    let blank = vec![String::new(); v_pad];
    let padded = blank
        .iter()
        .chain(wrapped.iter())
        .chain(blank.iter())
        .map(|line| {
            format!(
                "{:<width$}",
                concat_string!(pad, line, pad),
                width = line_length
            )
        })
        .collect();
    (padded, line_length)
}

/// Greedy wrap that breaks on whitespace and hard-cuts a word longer than
/// `width` at the boundary, no hyphen. Line breaks already in the message
/// stay forced breaks. An empty message still yields one empty line.
fn wrap(message: &str, width: usize) -> Vec<String> {
    let options = textwrap::Options::new(width)
        .break_words(true)
        .word_splitter(textwrap::WordSplitter::NoHyphenation)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

    let mut lines = Vec::new();
    for part in message.lines() {
        for line in textwrap::wrap(part, options.clone()) {
            lines.push(line.into_owned());
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Draw the bubble, its pointer, and the animal underneath. A negative
/// animal offset becomes extra left margin for the whole drawing, so the
/// animal keeps its leftward lean without clipping at the screen edge.
pub fn render(lines: &[String], line_length: usize, animal: &Animal, imagine: bool) -> String {
    let (left, right, arrow) = if imagine {
        ('(', ')', 'o')
    } else {
        ('|', '|', 'v')
    };
    let extra = if animal.offset < 0 {
        animal.offset.unsigned_abs()
    } else {
        0
    };
    let offset = if animal.offset < 0 {
        0
    } else {
        animal.offset as usize
    };

    let border_margin = " ".repeat(HORIZONTAL_MARGIN + 1 + extra);
    let side_margin = " ".repeat(HORIZONTAL_MARGIN + extra);
    let arrow_col = line_length / 2;

    let mut o = String::with_capacity((lines.len() + 10) * (line_length + 16));
    o.push_str(&border_margin);
    o.push_str(&"-".repeat(line_length));
    o.push_str(CRLF);
    for line in lines {
        o.push_str(&side_margin);
        o.push(left);
        o.push_str(line);
        o.push(right);
        o.push_str(CRLF);
    }
    o.push_str(&border_margin);
    o.push_str(&"-".repeat(arrow_col.saturating_sub(1)));
    o.push(arrow);
    o.push_str(&"-".repeat(line_length - arrow_col));
    o.push_str(&CRLF.repeat(VERTICAL_MARGIN + 1));

    let center = (line_length as isize - animal.width() as isize).div_euclid(2);
    let indent = (HORIZONTAL_MARGIN + 1 + offset) as isize + center;
    let animal_margin = " ".repeat(indent.max(0) as usize);
    for line in animal.lines() {
        o.push_str(&animal_margin);
        o.push_str(line);
        o.push_str(CRLF);
    }
    o.push_str(&CRLF.repeat(2));
    o
}
