use std::io;
use std::sync::mpsc::RecvError;

use thiserror::Error;

use crate::tiles::DrawError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),
    #[error("Search stopped before sending a solution")]
    SearchDisconnected(#[from] RecvError),
}
