pub struct Icons;

impl Icons {
    pub const CHAT: &str = "💬";
    pub const CHECK: &str = "✅";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const BULLET: &str = "•";
    pub const PROMPT: &str = "›";
}
