//! DieFacePresenter - Renders each published roll to an output sink

use std::io::Write;

use dice_domain::{RollResult, RollState};
use dice_usecase::RollObserver;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Unicode die faces U+2680..=U+2685
const GLYPHS: [char; RollResult::FACES] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// Pip layout on a 3x3 grid, row-major, per face
const PIPS: [[bool; 9]; RollResult::FACES] = [
    [false, false, false, false, true, false, false, false, false],
    [true, false, false, false, false, false, false, false, true],
    [true, false, false, false, true, false, false, false, true],
    [true, false, true, false, false, false, true, false, true],
    [true, false, true, false, true, false, true, false, true],
    [true, false, true, true, false, true, true, false, true],
];

const ASCII_BORDER: &str = "+-------+";

/// How a face is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceStyle {
    /// "4"
    Digit,
    /// "⚃"
    #[default]
    Glyph,
    /// Five-line pip drawing
    Ascii,
}

impl FaceStyle {
    pub fn render(&self, result: RollResult) -> String {
        match self {
            FaceStyle::Digit => result.to_string(),
            FaceStyle::Glyph => glyph(result).to_string(),
            FaceStyle::Ascii => ascii(result),
        }
    }
}

impl core::str::FromStr for FaceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "digit" => Ok(FaceStyle::Digit),
            "glyph" => Ok(FaceStyle::Glyph),
            "ascii" => Ok(FaceStyle::Ascii),
            other => Err(format!(
                "Unknown face style '{}'. Expected one of: digit, glyph, ascii",
                other
            )),
        }
    }
}

impl core::fmt::Display for FaceStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            FaceStyle::Digit => "digit",
            FaceStyle::Glyph => "glyph",
            FaceStyle::Ascii => "ascii",
        };
        write!(f, "{}", name)
    }
}

/// The Unicode die face for a result
pub fn glyph(result: RollResult) -> char {
    GLYPHS[face_index(result)]
}

fn ascii(result: RollResult) -> String {
    let pips = &PIPS[face_index(result)];
    let mut lines = vec![ASCII_BORDER.to_string()];
    for row in pips.chunks(3) {
        let cells: Vec<char> = row.iter().map(|&p| if p { 'o' } else { ' ' }).collect();
        lines.push(format!("| {} {} {} |", cells[0], cells[1], cells[2]));
    }
    lines.push(ASCII_BORDER.to_string());
    lines.join("\n")
}

fn face_index(result: RollResult) -> usize {
    (result.value() - RollResult::MIN) as usize
}

/// Writes a rendering of every published state to `sink`
#[derive(Debug)]
pub struct DieFacePresenter<W> {
    sink: W,
    style: FaceStyle,
}

impl<W: Write> DieFacePresenter<W> {
    pub fn new(sink: W, style: FaceStyle) -> Self {
        Self { sink, style }
    }

    pub fn style(&self) -> FaceStyle {
        self.style
    }

    /// Render and write one state
    pub fn present(&mut self, state: &RollState) -> std::io::Result<()> {
        writeln!(self.sink, "{}", self.style.render(state.result()))?;
        self.sink.flush()
    }
}

impl<W: Write + Send> RollObserver for DieFacePresenter<W> {
    fn on_roll(&mut self, state: &RollState) {
        if let Err(e) = self.present(state) {
            warn!(
                error = %e,
                generation = state.generation(),
                "Failed to present roll"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn face(value: u8) -> RollResult {
        RollResult::new(value).unwrap()
    }

    /// Write sink the test can still read after handing it over
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // ============== Rendering ==============

    #[test]
    fn test_digit_style() {
        for result in RollResult::all() {
            assert_eq!(FaceStyle::Digit.render(result), result.value().to_string());
        }
    }

    #[test]
    fn test_glyph_style() {
        let rendered: String = RollResult::all()
            .map(|r| FaceStyle::Glyph.render(r))
            .collect();
        assert_eq!(rendered, "⚀⚁⚂⚃⚄⚅");
    }

    #[test]
    fn test_ascii_pip_counts() {
        for result in RollResult::all() {
            let drawing = FaceStyle::Ascii.render(result);
            let pips = drawing.chars().filter(|&c| c == 'o').count();
            assert_eq!(pips, result.value() as usize);
            assert_eq!(drawing.lines().count(), 5);
            assert!(drawing.lines().all(|l| l.chars().count() == 9));
        }
    }

    #[test]
    fn test_ascii_five() {
        let expected = "+-------+\n| o   o |\n|   o   |\n| o   o |\n+-------+";
        assert_eq!(FaceStyle::Ascii.render(face(5)), expected);
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("digit".parse::<FaceStyle>(), Ok(FaceStyle::Digit));
        assert_eq!("GLYPH".parse::<FaceStyle>(), Ok(FaceStyle::Glyph));
        assert_eq!("ascii".parse::<FaceStyle>(), Ok(FaceStyle::Ascii));
        assert!("emoji".parse::<FaceStyle>().is_err());
        assert_eq!(FaceStyle::Ascii.to_string(), "ascii");
    }

    // ============== Observer ==============

    #[test]
    fn test_presenter_writes_each_roll() {
        let buffer = SharedBuffer::default();
        let mut presenter = DieFacePresenter::new(buffer.clone(), FaceStyle::Digit);

        let first = RollState::default().advance(face(3));
        presenter.on_roll(&first);
        presenter.on_roll(&first.advance(face(3)));

        assert_eq!(buffer.contents(), "3\n3\n");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut presenter = DieFacePresenter::new(BrokenPipe, FaceStyle::Glyph);
        let state = RollState::default().advance(face(6));

        assert!(presenter.present(&state).is_err());
        presenter.on_roll(&state);
    }
}
