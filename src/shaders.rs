// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static RIPPLES_WGSL: &str = include_str!("../shaders/ripples.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
