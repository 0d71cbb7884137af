use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &str = "\
LEFT, RIGHT     Move by one day
UP, DOWN        Move by one week
n, PAGE DOWN    Next month
p, PAGE UP      Previous month
N, P            Forward/back one year
t               Go to today
0, HOME         Back to the first month
SPACE, ENTER    Pick the highlighted date
?               Show this help
q, ESC          Quit

Press the Any Key to dismiss.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::raw(TEXT);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height]).flex(Flex::Center).areas(help_area);
        Clear.render(help_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0)
            .render(help_area, buf);
    }
}
