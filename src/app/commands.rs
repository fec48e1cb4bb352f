//! Text command parsing for the interactive shell.
//!
//! One line of input maps to at most one [`Event`]. Some commands depend on
//! the current page: `cat` toggles on the home page and selects elsewhere,
//! `qty <n>` sets the detail quantity while `qty <id> <n>` edits a cart
//! line.

use super::handler::Event;
use super::modes::Page;
use crate::engine::SortOrder;
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
go <path>         이동 (/, /products?category=wig, /search?q=미쿠, /cart)
cat <id|all>      카테고리 선택
anime <id>        작품 필터 켜기/끄기
sort <order>      latest | price-low | price-high | discount
clear [category]  필터 초기화 (category: 카테고리만)
search <q>        검색
open <id>         상품 상세
add [id] [qty]    장바구니 담기 (상세 페이지에서는 id 생략)
qty [id] <n>      수량 변경
rm <id>           장바구니에서 삭제
empty             장바구니 비우기
checkout          주문하기
tick | banner <n> 배너 넘기기 / 선택
help              도움말
quit              종료";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (help: 도움말)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("unknown sort order: {0} (latest, price-low, price-high, discount)")]
    UnknownSort(String),
}

/// What a line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    /// Blank line: just redraw.
    Redraw,
}

/// Parses one input line against the current page.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands, missing arguments and
/// malformed numbers or sort orders.
pub fn parse_command(line: &str, page: &Page) -> Result<Command, CommandError> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let event = match cmd {
        "" => return Ok(Command::Redraw),
        "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => Event::Quit,
        "go" => Event::Navigate(required(rest, "go <path>")?.to_string()),
        "home" => Event::Navigate("/".to_string()),
        "cart" => Event::Navigate("/cart".to_string()),
        "cat" => {
            let id = required(rest, "cat <id|all>")?.to_string();
            if *page == Page::Home {
                Event::ToggleCategory(id)
            } else {
                Event::SelectCategory(id)
            }
        }
        "anime" => Event::ToggleAnime(required(rest, "anime <id>")?.to_string()),
        "sort" => {
            let value = required(rest, "sort <order>")?;
            Event::SetSort(SortOrder::parse(value).ok_or_else(|| CommandError::UnknownSort(value.to_string()))?)
        }
        "clear" => match rest {
            "" => Event::ClearFilters,
            "category" | "cat" => Event::ClearCategory,
            _ => return Err(CommandError::Usage("clear [category]")),
        },
        "search" => Event::SubmitSearch(rest.to_string()),
        "open" => Event::OpenProduct(required(rest, "open <id>")?.to_string()),
        "add" => match args.as_slice() {
            [] => Event::AddDetailToCart,
            [id] => Event::AddToCart {
                product_id: (*id).to_string(),
                quantity: 1,
            },
            [id, qty] => Event::AddToCart {
                product_id: (*id).to_string(),
                quantity: number(qty)?,
            },
            _ => return Err(CommandError::Usage("add [id] [qty]")),
        },
        "qty" => match args.as_slice() {
            [n] => Event::SetQuantity(number(n)?),
            [id, n] => Event::UpdateCartQuantity {
                product_id: (*id).to_string(),
                quantity: number(n)?,
            },
            _ => return Err(CommandError::Usage("qty [id] <n>")),
        },
        "rm" => Event::RemoveFromCart(required(rest, "rm <id>")?.to_string()),
        "empty" => Event::ClearCart,
        "checkout" => Event::Checkout,
        "tick" => Event::BannerTick,
        "banner" => Event::SelectBanner(number::<usize>(required(rest, "banner <n>")?)?.saturating_sub(1)),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Command::Event(event))
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::NotANumber(value.to_string()))
}
