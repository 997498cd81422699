pub mod second_chance;
