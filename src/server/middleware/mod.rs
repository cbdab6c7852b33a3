pub mod session;

#[cfg(test)]
mod test;
