//! Форматирование цены для витрины: `"3000 р."` → `"3 000 ₽"`

/// Знак рубля, добавляемый после суммы
pub const RUBLE_SUFFIX: &str = " ₽";

/// Переводит цену вида `"<цифры> р."` в `"<цифры с разрядами> ₽"`.
///
/// Проверки входа нет: строка очищается от первого `" р."`, затем от первого
/// `"р."` и первой оставшейся `"р"`; остаток группируется по три цифры.
///
/// # Примеры
///
/// ```
/// use contracts::shared::price_format::format_price;
/// assert_eq!(format_price("3000 р."), "3 000 ₽");
/// assert_eq!(format_price("10000 р."), "10 000 ₽");
/// ```
pub fn format_price(raw: &str) -> String {
    let amount = raw
        .replacen(" р.", "", 1)
        .replacen("р.", "", 1)
        .replacen('р', "", 1);

    format!("{}{}", group_thousands(&amount), RUBLE_SUFFIX)
}

/// Вставляет пробел перед каждой тройкой цифр, за которой до конца числа
/// идут только полные тройки.
///
/// Граница такая же, как у `\B(?=(\d{3})+(?!\d))`: в начале серии цифр
/// пробел ставится только если слева стоит буква ASCII или `_`.
pub fn group_thousands(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut result = String::with_capacity(value.len() + value.len() / 3);

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }

        for (pos, c) in chars.iter().enumerate().take(end).skip(start) {
            let remaining = end - pos;
            let at_start = pos == start;
            let boundary_ok = !at_start || (start > 0 && is_word_char(chars[start - 1]));
            if remaining % 3 == 0 && boundary_ok {
                result.push(' ');
            }
            result.push(*c);
        }

        i = end;
    }

    result
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
