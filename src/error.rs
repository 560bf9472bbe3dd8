use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordPlayError {
    /// Fewer than two arguments on the command line.
    #[error("Please include the characters in the problem and the dictionary file")]
    Usage,

    /// The dictionary file could not be opened.
    #[error("Error opening file")]
    OpenDictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed after the dictionary was opened.
    #[error("Error reading file: {0}")]
    ReadDictionary(#[from] std::io::Error),

    /// Writing the results failed.
    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),
}

impl WordPlayError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WordPlayError::Usage => 1,
            WordPlayError::OpenDictionary { .. } | WordPlayError::ReadDictionary(_) => 2,
            WordPlayError::Output(_) => 3,
        }
    }
}
