//! Beliefs about the adversary built from perception, hearing and damage

pub mod enemy;

pub use enemy::EnemyKnowledge;
