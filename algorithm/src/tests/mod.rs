mod test_bonus;
mod test_distance;
