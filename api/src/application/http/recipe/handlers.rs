pub mod recipe_generator_flow;
