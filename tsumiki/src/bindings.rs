use tsumiki_ipc::{modifier, ClickRegion, Command};

/// Modifier state as an X modifier mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u32);

impl Modifiers {
    /// Bits that take part in matching. Lock and NumLock (Mod2) never do.
    const SIGNIFICANT: u32 = modifier::SHIFT
        | modifier::CONTROL
        | modifier::MOD1
        | modifier::MOD3
        | modifier::MOD4
        | modifier::MOD5;

    pub fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    pub fn mask(self) -> u32 {
        self.0
    }

    /// Strips Lock/NumLock and any bit outside the modifier range.
    pub fn clean(self) -> Self {
        Self(self.0 & Self::SIGNIFICANT)
    }

    pub fn with(self, other: u32) -> Self {
        Self(self.0 | other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub modifiers: Modifiers,
    pub keysym: String,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonBinding {
    pub region: ClickRegion,
    pub modifiers: Modifiers,
    pub button: u32,
    pub command: Command,
}

/// Immutable key and button tables, scanned in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    keys: Vec<KeyBinding>,
    buttons: Vec<ButtonBinding>,
}

impl Bindings {
    pub fn new(keys: Vec<KeyBinding>, buttons: Vec<ButtonBinding>) -> Self {
        Self { keys, buttons }
    }

    /// First key binding whose cleaned modifiers and keysym equal the event's.
    pub fn lookup_key(&self, modifiers: u32, keysym: &str) -> Option<&Command> {
        let modifiers = Modifiers::from_mask(modifiers).clean();
        self.keys
            .iter()
            .find(|b| b.modifiers.clean() == modifiers && b.keysym == keysym)
            .map(|b| &b.command)
    }

    pub fn lookup_button(
        &self,
        region: ClickRegion,
        modifiers: u32,
        button: u32,
    ) -> Option<&Command> {
        let modifiers = Modifiers::from_mask(modifiers).clean();
        self.buttons
            .iter()
            .find(|b| {
                b.region == region && b.button == button && b.modifiers.clean() == modifiers
            })
            .map(|b| &b.command)
    }

    pub fn list_bindings(&self) -> Vec<(String, Command)> {
        let keys = self
            .keys
            .iter()
            .map(|b| (format_keybind(b.modifiers, &b.keysym), b.command.clone()));
        let buttons = self.buttons.iter().map(|b| {
            let mut parts = vec![format!("{:?}", b.region)];
            let mods = format_modifiers(b.modifiers);
            if !mods.is_empty() {
                parts.push(mods);
            }
            parts.push(format!("button{}", b.button));
            (parts.join(" "), b.command.clone())
        });
        keys.chain(buttons).collect()
    }
}

fn parse_modifier(name: &str) -> Result<u32, String> {
    match name.to_lowercase().as_str() {
        "shift" => Ok(modifier::SHIFT),
        "ctrl" | "control" => Ok(modifier::CONTROL),
        "alt" | "mod1" => Ok(modifier::MOD1),
        "mod3" => Ok(modifier::MOD3),
        "super" | "mod4" | "win" | "logo" => Ok(modifier::MOD4),
        "mod5" => Ok(modifier::MOD5),
        _ => Err(format!("Unknown modifier: {}", name)),
    }
}

/// Parses a modifier list such as `"ctrl-shift"`. The empty string is no
/// modifier.
pub fn parse_modifiers(mods: &str) -> Result<Modifiers, String> {
    if mods.is_empty() {
        return Ok(Modifiers::default());
    }
    mods.split('-')
        .try_fold(Modifiers::default(), |acc, part| {
            parse_modifier(part).map(|bit| acc.with(bit))
        })
}

/// Parses `"ctrl-shift-Return"` into a modifier mask and canonical keysym.
pub fn parse_keybind(key_str: &str) -> Result<(Modifiers, String), String> {
    let parts: Vec<&str> = key_str.split('-').collect();
    let Some((key_part, mod_parts)) = parts.split_last() else {
        return Err("Empty key string".to_string());
    };

    let mut modifiers = Modifiers::default();
    for part in mod_parts {
        modifiers = modifiers.with(parse_modifier(part)?);
    }

    Ok((modifiers, normalize_keysym(key_part)?))
}

pub fn format_modifiers(modifiers: Modifiers) -> String {
    const NAMES: [(u32, &str); 6] = [
        (modifier::MOD4, "super"),
        (modifier::MOD1, "alt"),
        (modifier::CONTROL, "ctrl"),
        (modifier::SHIFT, "shift"),
        (modifier::MOD3, "mod3"),
        (modifier::MOD5, "mod5"),
    ];
    NAMES
        .iter()
        .filter(|(bit, _)| modifiers.mask() & bit != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn format_keybind(modifiers: Modifiers, keysym: &str) -> String {
    let mods = format_modifiers(modifiers);
    if mods.is_empty() {
        keysym.to_string()
    } else {
        format!("{}-{}", mods, keysym)
    }
}

/// Maps a configured key name to the keysym name the host reports.
///
/// Single characters are lowercased (unshifted keysyms), common names are
/// accepted case-insensitively, and any other alphanumeric name is taken as
/// a raw keysym (`XF86AudioMute`).
pub fn normalize_keysym(key: &str) -> Result<String, String> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return Err("Empty key".to_string()),
        (Some(c), None) => {
            if c.is_ascii_graphic() {
                return Ok(c.to_ascii_lowercase().to_string());
            }
            return Err(format!("Unknown key: {}", key));
        }
        _ => {}
    }

    let lower = key.to_lowercase();
    let named = match lower.as_str() {
        "return" | "enter" => "Return",
        "tab" => "Tab",
        "space" => "space",
        "backspace" => "BackSpace",
        "delete" => "Delete",
        "escape" | "esc" => "Escape",
        "left" => "Left",
        "right" => "Right",
        "up" => "Up",
        "down" => "Down",
        "home" => "Home",
        "end" => "End",
        "print" => "Print",
        "minus" => "minus",
        "equal" => "equal",
        "comma" => "comma",
        "period" => "period",
        "slash" => "slash",
        "backslash" => "backslash",
        "semicolon" => "semicolon",
        "apostrophe" | "quote" => "apostrophe",
        "grave" => "grave",
        "bracketleft" | "leftbracket" => "bracketleft",
        "bracketright" | "rightbracket" => "bracketright",
        _ => "",
    };
    if !named.is_empty() {
        return Ok(named.to_string());
    }

    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            return Ok(format!("F{}", n));
        }
    }

    if key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Ok(key.to_string());
    }
    Err(format!("Unknown key: {}", key))
}
