/// Клавиши навигации по вкладкам (WAI-ARIA tabs pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    ArrowRight,
    ArrowLeft,
    Home,
    End,
}

impl TabKey {
    /// Значение `KeyboardEvent.key` для клавиши
    pub fn as_str(&self) -> &'static str {
        match self {
            TabKey::ArrowRight => "ArrowRight",
            TabKey::ArrowLeft => "ArrowLeft",
            TabKey::Home => "Home",
            TabKey::End => "End",
        }
    }

    /// Все поддерживаемые клавиши
    pub fn all() -> [TabKey; 4] {
        [TabKey::ArrowRight, TabKey::ArrowLeft, TabKey::Home, TabKey::End]
    }

    /// Парсинг из `KeyboardEvent.key`; прочие клавиши не обрабатываются
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(TabKey::ArrowRight),
            "ArrowLeft" => Some(TabKey::ArrowLeft),
            "Home" => Some(TabKey::Home),
            "End" => Some(TabKey::End),
            _ => None,
        }
    }

    /// Target index when this key is pressed on tab `current`; `last` is the
    /// index of the final tab. Arrows wrap around.
    pub fn next_index(&self, current: usize, last: usize) -> usize {
        match self {
            TabKey::ArrowRight => {
                if current >= last {
                    0
                } else {
                    current + 1
                }
            }
            TabKey::ArrowLeft => {
                if current == 0 || current > last {
                    last
                } else {
                    current - 1
                }
            }
            TabKey::Home => 0,
            TabKey::End => last,
        }
    }
}
