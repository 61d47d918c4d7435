use crate::app::prefs::PrefsError;
use crate::snake;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{error, fmt};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    PrefsError(PrefsError),
    SnakeBuilderError(snake::BuilderError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<PrefsError> for AppError {
    fn from(e: PrefsError) -> Self {
        Self(AppErrorType::PrefsError(e), vec![])
    }
}

impl From<snake::BuilderError> for AppError {
    fn from(e: snake::BuilderError) -> Self {
        Self(AppErrorType::SnakeBuilderError(e), vec![])
    }
}

// lets errors cross back into ggez callbacks that only know GameError
impl From<AppError> for GameError {
    fn from(e: AppError) -> Self {
        GameError::CustomError(e.to_string())
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl error::Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_innermost_last() {
    let result: AppResult = Err(AppError::from(PrefsError::Fps(0.)));
    let err = result
        .with_trace_step("Prefs::validate")
        .with_trace_step("main")
        .unwrap_err();

    assert!(matches!(err.0, AppErrorType::PrefsError(PrefsError::Fps(_))));
    let text = err.to_string();
    let main = text.find(" in main").unwrap();
    let validate = text.find(" in Prefs::validate").unwrap();
    assert!(main < validate, "{}", text);
}
