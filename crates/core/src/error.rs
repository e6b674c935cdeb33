use std::{error::Error, fmt::Display};

/// Failures of [`crate::PieceQueue`] primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueError {
    Empty,
    Full,
    /// Fewer pieces than a block operation addresses.
    TooShallow,
}

impl Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use QueueError::*;
        write!(f, "{}", match self {
            Empty => "the queue is empty",
            Full => "the queue is full",
            TooShallow => "the queue holds too few pieces",
        })
    }
}

impl Error for QueueError {}

/// Failures of [`crate::ReserveStack`] primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
    Full,
    Empty,
    InsufficientDepth,
}

impl Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use StackError::*;
        write!(f, "{}", match self {
            Full => "the reserve stack is full",
            Empty => "the reserve stack is empty",
            InsufficientDepth => "the reserve stack holds too few pieces",
        })
    }
}

impl Error for StackError {}

/// Named failure of an engine command. State is unchanged whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineError {
    EmptyQueue,
    QueueFull,
    StackFull,
    StackEmpty,
    InsufficientQueueDepth,
    InsufficientStackDepth,
}

impl EngineError {
    /// Stable snake_case code, used in the session log
    pub fn code(&self) -> &'static str {
        use EngineError::*;
        match self {
            EmptyQueue => "empty_queue",
            QueueFull => "queue_full",
            StackFull => "stack_full",
            StackEmpty => "stack_empty",
            InsufficientQueueDepth => "insufficient_queue_depth",
            InsufficientStackDepth => "insufficient_stack_depth",
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use EngineError::*;
        write!(f, "{}", match self {
            EmptyQueue => "the queue is empty",
            QueueFull => "the queue is full, play a piece first",
            StackFull => "the reserve stack is full",
            StackEmpty => "the reserve stack is empty",
            InsufficientQueueDepth => "the queue needs at least 3 pieces",
            InsufficientStackDepth => "the reserve stack needs at least 3 pieces",
        })
    }
}

impl Error for EngineError {}

impl From<QueueError> for EngineError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::Empty => EngineError::EmptyQueue,
            QueueError::Full => EngineError::QueueFull,
            QueueError::TooShallow => EngineError::InsufficientQueueDepth,
        }
    }
}

impl From<StackError> for EngineError {
    fn from(e: StackError) -> Self {
        match e {
            StackError::Full => EngineError::StackFull,
            StackError::Empty => EngineError::StackEmpty,
            StackError::InsufficientDepth => EngineError::InsufficientStackDepth,
        }
    }
}
