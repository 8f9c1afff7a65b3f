mod test_bonus;
mod test_three_decimals;
