pub mod athlete;
pub mod category;
pub mod training_center;

#[cfg(test)]
pub(crate) mod test_support;
