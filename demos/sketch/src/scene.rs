use anyhow::Result;

pub trait Scene {
    fn activation(&mut self) -> Result<()>;
    fn deactivation(&mut self) -> Result<()>;

    fn frame(&mut self, index: usize, delta: f32) -> Result<()>;
}
