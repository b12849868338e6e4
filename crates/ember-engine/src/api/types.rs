use slotmap::new_key_type;

new_key_type! {
    /// Generational handle to an actor owned by a [`Scene`](crate::Scene).
    pub struct ActorId;

    /// Generational handle to a component attached to some actor.
    pub struct ComponentId;
}

/// Addresses one component slot: the owning actor plus the component's id.
///
/// Draw lists store these instead of references, so a stale entry resolves to
/// `None` rather than dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub actor: ActorId,
    pub component: ComponentId,
}

impl ComponentRef {
    pub fn new(actor: ActorId, component: ComponentId) -> Self {
        Self { actor, component }
    }
}

/// Platform-neutral key identifier (scancode-like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const W: KeyCode = KeyCode(26);
    pub const A: KeyCode = KeyCode(4);
    pub const S: KeyCode = KeyCode(22);
    pub const D: KeyCode = KeyCode(7);
    pub const ESCAPE: KeyCode = KeyCode(41);
    pub const RIGHT: KeyCode = KeyCode(79);
    pub const LEFT: KeyCode = KeyCode(80);
    pub const DOWN: KeyCode = KeyCode(81);
    pub const UP: KeyCode = KeyCode(82);
}
