pub mod womens_health;
