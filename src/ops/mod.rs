pub mod row_ops;
pub mod task_ops;
pub mod text_input;
