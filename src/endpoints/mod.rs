//! Concrete proxy endpoints. Each one is a configuration of
//! [`ProxyHandler`](crate::proxy::ProxyHandler).

mod dog;
mod sample;
mod weather;

pub use dog::{DogImage, DogImageResponse};
pub use sample::Sample;
pub use weather::{Weather, WeatherReport};
