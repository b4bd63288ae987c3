pub mod test_merkle;
