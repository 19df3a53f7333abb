use std::collections::BTreeMap;
use std::fmt;

use crate::ChatView;

/// A named partition of the chat log. Any name is a valid channel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(String);

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn first() -> Self {
        Self::new("first")
    }

    pub fn second() -> Self {
        Self::new("second")
    }

    /// Channels the shell offers buttons for.
    pub fn presets() -> [Channel; 2] {
        [Self::first(), Self::second()]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequence number of a message within one chat session, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ChatState {
    channel: Channel,
    text: String,
    log: BTreeMap<Channel, Vec<Message>>,
    last_id: u64,
}

impl ChatState {
    pub(crate) fn channel_selected(&mut self, name: String) {
        let channel = Channel::new(name);
        if channel != self.channel {
            self.channel = channel;
        }
    }

    pub(crate) fn input_changed(&mut self, text: String) {
        self.text = text;
    }

    /// Appends the composing text to the channel current right now and clears it.
    pub(crate) fn send_clicked(&mut self) {
        self.last_id += 1;
        let message = Message {
            id: MessageId(self.last_id),
            text: std::mem::take(&mut self.text),
        };
        self.log
            .entry(self.channel.clone())
            .or_default()
            .push(message);
    }

    fn messages(&self, channel: &Channel) -> &[Message] {
        self.log.get(channel).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn view(&self) -> ChatView {
        ChatView {
            channel: self.channel.clone(),
            text: self.text.clone(),
            messages: self.messages(&self.channel).to_vec(),
        }
    }
}
