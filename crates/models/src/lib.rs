pub mod errors;
pub mod db;
pub mod teacher;

#[cfg(test)]
mod tests;
