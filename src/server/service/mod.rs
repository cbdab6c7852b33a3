pub mod proxy;

#[cfg(test)]
mod test;
