//! The fixed Roblox Studio service hierarchy that gets materialized on disk.

/// Relative directories created under the root, parents before children.
pub const DIRECTORIES: &[&str] = &[
    "Workspace",
    "Workspace/Camera",
    "Workspace/Terrain",
    "Workspace/SpawnLocation",
    "Workspace/Baseplate",
    "Players",
    "Lighting",
    "Lighting/Atmosphere",
    "Lighting/Sky",
    "Lighting/Bloom",
    "Lighting/DepthOfField",
    "Lighting/SunRays",
    "MaterialService",
    "ReplicatedFirst",
    "ReplicatedStorage",
    "ServerScriptService",
    "ServerStorage",
    "StarterGui",
    "StarterPack",
    "StarterPlayer",
    "StarterPlayer/StarterCharacterScripts",
    "StarterPlayer/StarterPlayerScripts",
    "Teams",
    "SoundService",
    "TextChatService",
    "TextChatService/ChatWindowConfiguration",
    "TextChatService/ChatInputBarConfiguration",
    "TextChatService/ChannelTabsConfiguration",
    "TextChatService/BubbleChatConfiguration",
];

/// Top-level service names in declaration order.
#[cfg(test)]
pub fn top_level() -> impl Iterator<Item = &'static str> {
    DIRECTORIES.iter().copied().filter(|entry| !entry.contains('/'))
}

/// Leaf names nested directly under `service`.
#[cfg(test)]
pub fn children(service: &str) -> impl Iterator<Item = &'static str> + '_ {
    DIRECTORIES.iter().filter_map(move |entry| {
        entry
            .split_once('/')
            .filter(|(parent, _)| *parent == service)
            .map(|(_, child)| child)
    })
}
