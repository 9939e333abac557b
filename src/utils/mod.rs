// Utilities module - board parsing, road network and distances

pub mod distance;
pub mod generator;
pub mod init_board;
pub mod road_network;
