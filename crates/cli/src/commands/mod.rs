mod args_env;
mod transitive_refs;

pub(crate) use args_env::cmd_args_env;
pub(crate) use transitive_refs::cmd_transitive_refs;
