mod collect;
mod copy_eq;
mod serde_seq;
mod text;
