pub mod time_graph;
