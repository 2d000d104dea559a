
mod rebase;
