pub mod collision_type;
