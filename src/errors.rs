use std::fmt;
use std::io;

/// Errors raised while interpreting an L-system: malformed operation-table
/// entries or an unbalanced save stack. These are configuration mistakes in
/// the rule/operation tables, so a run aborts on the first one; nothing here
/// is retried or recovered mid-run.
#[derive(Debug)]
pub enum LSystemError {
    UnknownOpcode(String),
    MissingOperand { opcode: String, expected: usize, found: usize },
    MalformedNumber(String),
    MalformedColor(String),
    StackUnderflow,
}

impl std::error::Error for LSystemError {}

impl fmt::Display for LSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LSystemError::UnknownOpcode(op) => write!(f, "unknown operation: {}", op),
            LSystemError::MissingOperand { opcode, expected, found } => write!(
                f,
                "operation '{}' expects {} operand(s), found {}",
                opcode, expected, found
            ),
            LSystemError::MalformedNumber(tok) => write!(f, "malformed number: {}", tok),
            LSystemError::MalformedColor(tok) => {
                write!(f, "malformed color (want #rrggbbaa): {}", tok)
            }
            LSystemError::StackUnderflow => write!(f, "popping from an empty pen stack"),
        }
    }
}

/// Errors from the pen's persistence path. Unlike [`LSystemError`] these are
/// ordinary reported errors: the caller gets them back from `save` and the
/// drawing stays intact.
#[derive(Debug)]
pub enum PenError {
    UnsupportedFormat(String),
    EmptyDrawing,
    Io(io::Error),
    Encode(image::ImageError),
}

impl std::error::Error for PenError {}

impl fmt::Display for PenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PenError::UnsupportedFormat(name) => {
                write!(f, "unsupported output format (only .png): {}", name)
            }
            PenError::EmptyDrawing => write!(f, "nothing drawn; refusing to save an empty image"),
            PenError::Io(e) => write!(f, "io error: {}", e),
            PenError::Encode(e) => write!(f, "image encoding error: {}", e),
        }
    }
}

impl From<io::Error> for PenError {
    fn from(error: io::Error) -> Self {
        PenError::Io(error)
    }
}

impl From<image::ImageError> for PenError {
    fn from(error: image::ImageError) -> Self {
        PenError::Encode(error)
    }
}
