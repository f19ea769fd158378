//! Всплывающие уведомления.
//!
//! Операции с данными уведомлений не показывают: они возвращают результат,
//! а страница решает, какой `Notice` из него сделать.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Сколько уведомление висит на экране
pub const NOTICE_TTL_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    pub notices: RwSignal<Vec<Notice>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    /// Показать уведомление и убрать его через `NOTICE_TTL_MS`
    pub fn show(&self, notice: Notice) {
        let id = notice.id;
        self.notices.update(|n| n.push(notice));
        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notices.try_update(|n| n.retain(|x| x.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found in context")
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-host">
            <For
                each=move || service.notices.get()
                key=|n| n.id
                children=move |n: Notice| {
                    let id = n.id;
                    view! {
                        <div class=n.class() on:click=move |_| service.dismiss(id)>
                            {n.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
