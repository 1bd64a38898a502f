use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::message::{AskResponse, ChatMessage, ChatRole};

/// Shown when the backend replied but the payload held no usable answer.
pub const MISSING_ANSWER: &str = "Sorry, I couldn't get an answer.";

/// Shown when the in-flight ask task itself failed (panic or runtime
/// shutdown). The API helper swallows transport errors, so ordinarily this
/// never renders.
pub const CONNECT_ERROR: &str = "Error: Failed to connect to server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,

    // Conversation state
    pub input: String,
    pub cursor: usize, // char position in input
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub ask_task: Option<JoinHandle<AskResponse>>,

    // Chat viewport state
    pub chat_scroll: u16,
    pub chat_height: u16, // inner height of chat area, set during render
    pub chat_width: u16,  // inner width of chat area, for wrap calculations
    pub total_chat_lines: u16,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    pub api: ApiClient,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Editing,

            input: String::new(),
            cursor: 0,
            messages: Vec::new(),
            loading: false,
            ask_task: None,

            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            total_chat_lines: 0,

            animation_frame: 0,

            api,
        }
    }

    /// Start a submission: append the user message, clear the input, and set
    /// the loading flag. Returns the question to send, or `None` when the
    /// trimmed input is empty or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        let question = self.input.trim();
        if question.is_empty() || self.loading {
            return None;
        }
        let question = question.to_string();

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: question.clone(),
        });
        self.input.clear();
        self.cursor = 0;
        self.loading = true;
        self.scroll_chat_to_bottom();

        Some(question)
    }

    /// Complete a submission with the answer payload from the API helper.
    /// A missing or empty answer is replaced with [`MISSING_ANSWER`].
    pub fn finish_submit(&mut self, response: AskResponse) {
        let answer = response
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| MISSING_ANSWER.to_string());

        self.messages.push(ChatMessage {
            role: ChatRole::Model,
            content: answer,
        });
        self.loading = false;
        self.scroll_chat_to_bottom();
    }

    /// Collect the answer once the background ask task completes. The API
    /// helper never fails, so a `JoinError` here means the task itself died;
    /// that is surfaced as an error message in the conversation.
    pub async fn poll_ask_task(&mut self) {
        if self.ask_task.as_ref().is_some_and(|task| task.is_finished()) {
            if let Some(task) = self.ask_task.take() {
                let response = match task.await {
                    Ok(response) => response,
                    Err(_) => AskResponse::with_answer(CONNECT_ERROR),
                };
                self.finish_submit(response);
            }
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.loading {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    // Chat scrolling
    pub fn scroll_down(&mut self) {
        if self.chat_scroll < self.total_chat_lines.saturating_sub(self.chat_height) {
            self.chat_scroll = self.chat_scroll.saturating_add(1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.chat_scroll = 0;
    }

    /// Number of rendered chat lines after wrapping at the current chat
    /// width. Both the scroll bound and the scrollbar use this, so scrolling
    /// stays in the same units the viewport renders in.
    pub fn wrapped_chat_lines(&self) -> u16 {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for msg in &self.messages {
            total_lines += 1; // Role line ("You:" or "AI:")
            for line in msg.content.lines() {
                // Use character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1; // Empty line still takes one line
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // Blank line after message
        }

        if self.loading {
            total_lines += 2; // "AI:" + "Thinking..."
        }

        total_lines
    }

    /// Pin the chat viewport to the newest message. Called whenever the
    /// message list changes so the latest entry (or the Thinking indicator)
    /// stays visible.
    pub fn scroll_chat_to_bottom(&mut self) {
        self.total_chat_lines = self.wrapped_chat_lines();

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        if self.total_chat_lines > visible_height {
            self.chat_scroll = self.total_chat_lines.saturating_sub(visible_height);
        }
    }
}
