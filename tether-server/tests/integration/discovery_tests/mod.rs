mod test_duplicate_join;
mod test_leave_symmetry;
mod test_room_advertisement;
