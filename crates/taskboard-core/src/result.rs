use crate::error::TaskBoardError;

pub type TaskBoardResult<T> = Result<T, TaskBoardError>;
