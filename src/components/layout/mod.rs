mod auth_shell;

pub(crate) use auth_shell::AuthShell;
