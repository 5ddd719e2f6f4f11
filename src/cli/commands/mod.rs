pub mod project;
pub mod task;
pub mod user;

#[cfg(test)]
mod test_support;
