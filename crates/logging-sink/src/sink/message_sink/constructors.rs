use super::MessageSink;

impl<W> MessageSink<W> {
    /// Creates a sink that writes plain, uncoloured lines.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_color(writer, false)
    }

    /// Creates a sink with an explicit colour setting.
    #[must_use]
    pub fn with_color(writer: W, color: bool) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
            color,
        }
    }

    /// Reports whether labels are wrapped in escape sequences.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Enables or disables coloured labels for subsequent lines.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
