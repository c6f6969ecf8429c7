//! イベント → ハンドラ能力の対応表
//!
//! ドロップゾーンとページ本体のイベントを一つの表で扱う。
//! ホスト（ブラウザ/CLI）は [`capabilities`] を見てデフォルト動作の抑止や
//! ハイライト切替、ファイル転送を行う。

/// イベントの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
    FileSelected,
}

impl EventKind {
    /// ドラッグ系イベント（ブラウザ登録対象）
    pub const DRAG: [EventKind; 4] = [
        EventKind::DragEnter,
        EventKind::DragOver,
        EventKind::DragLeave,
        EventKind::Drop,
    ];

    /// DOMイベント名
    pub fn dom_name(&self) -> &'static str {
        match self {
            EventKind::DragEnter => "dragenter",
            EventKind::DragOver => "dragover",
            EventKind::DragLeave => "dragleave",
            EventKind::Drop => "drop",
            EventKind::FileSelected => "change",
        }
    }
}

/// イベントの発生元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    DropZone,
    Body,
}

/// ハイライト操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Set,
    Clear,
    Keep,
}

/// ハンドラが持つ能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub suppress_default: bool,
    pub stop_propagation: bool,
    pub highlight: Highlight,
    pub forwards_files: bool,
}

impl Capabilities {
    const NONE: Capabilities = Capabilities {
        suppress_default: false,
        stop_propagation: false,
        highlight: Highlight::Keep,
        forwards_files: false,
    };

    const SUPPRESS: Capabilities = Capabilities {
        suppress_default: true,
        stop_propagation: true,
        ..Capabilities::NONE
    };
}

/// (発生元, 種類) → 能力
const HANDLERS: &[(EventTarget, EventKind, Capabilities)] = &[
    (EventTarget::DropZone, EventKind::DragEnter, Capabilities { highlight: Highlight::Set, ..Capabilities::SUPPRESS }),
    (EventTarget::DropZone, EventKind::DragOver, Capabilities { highlight: Highlight::Set, ..Capabilities::SUPPRESS }),
    (EventTarget::DropZone, EventKind::DragLeave, Capabilities { highlight: Highlight::Clear, ..Capabilities::SUPPRESS }),
    (
        EventTarget::DropZone,
        EventKind::Drop,
        Capabilities { highlight: Highlight::Clear, forwards_files: true, ..Capabilities::SUPPRESS },
    ),
    (EventTarget::DropZone, EventKind::FileSelected, Capabilities { forwards_files: true, ..Capabilities::NONE }),
    (EventTarget::Body, EventKind::DragEnter, Capabilities::SUPPRESS),
    (EventTarget::Body, EventKind::DragOver, Capabilities::SUPPRESS),
    (EventTarget::Body, EventKind::DragLeave, Capabilities::SUPPRESS),
    (EventTarget::Body, EventKind::Drop, Capabilities::SUPPRESS),
];

/// 対応表を引く。未登録の組み合わせは何もしない
pub fn capabilities(target: EventTarget, kind: EventKind) -> Capabilities {
    HANDLERS
        .iter()
        .find(|(t, k, _)| *t == target && *k == kind)
        .map(|(_, _, caps)| *caps)
        .unwrap_or(Capabilities::NONE)
}

/// ウィジェットに届くイベント
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent<F> {
    DragEnter,
    DragOver,
    DragLeave,
    Drop(Vec<F>),
    FileSelected(Vec<F>),
}

impl<F> WidgetEvent<F> {
    pub fn kind(&self) -> EventKind {
        match self {
            WidgetEvent::DragEnter => EventKind::DragEnter,
            WidgetEvent::DragOver => EventKind::DragOver,
            WidgetEvent::DragLeave => EventKind::DragLeave,
            WidgetEvent::Drop(_) => EventKind::Drop,
            WidgetEvent::FileSelected(_) => EventKind::FileSelected,
        }
    }

    /// 運んでいるファイル一覧を取り出す
    pub fn into_files(self) -> Option<Vec<F>> {
        match self {
            WidgetEvent::Drop(files) | WidgetEvent::FileSelected(files) => Some(files),
            _ => None,
        }
    }
}
