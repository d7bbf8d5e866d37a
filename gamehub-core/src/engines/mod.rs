//! Adapters from the pure rule types to [`GameEngine`](crate::engine::GameEngine).

pub mod blackjack;
pub mod board;
pub mod connect_four;
pub mod guess;
pub mod memory;
pub mod placeholder;
pub mod rps;
pub mod snake;
pub mod tiles;
pub mod whack;

pub use blackjack::BlackjackEngine;
pub use board::BoardEngine;
pub use connect_four::ConnectFourEngine;
pub use guess::GuessEngine;
pub use memory::MemoryEngine;
pub use placeholder::PlaceholderEngine;
pub use rps::RpsEngine;
pub use snake::SnakeEngine;
pub use tiles::TileEngine;
pub use whack::WhackEngine;
