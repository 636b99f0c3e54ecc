mod generate_roast;

pub use generate_roast::GenerateRoast;
