use cgmath::BaseFloat;

pub mod integration;

pub use self::integration::trapezoid;

pub trait Real: BaseFloat + 'static + Send + Sync {
    fn new<U: num::NumCast>(other: U) -> Self {
        num::NumCast::from(other).unwrap()
    }
}

impl<T> Real for T where T: BaseFloat + 'static + Send + Sync {}
