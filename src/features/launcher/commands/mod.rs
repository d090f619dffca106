pub mod open_path_in_explorer;

pub type CommandResult<T> = std::result::Result<T, String>;
