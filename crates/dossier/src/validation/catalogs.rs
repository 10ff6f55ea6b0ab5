//! Fixed value catalogs shared by the field validators.

/// Allowed values for `category_a` (political views).
pub static CATEGORY_A: &[&str] = &[
    "Индифферентные",
    "Социалистические",
    "Консервативные",
    "Коммунистические",
    "Либеральные",
    "Умеренные",
    "Анархистские",
    "Либертарианские",
];

/// Allowed values for `category_b` (worldview).
pub static CATEGORY_B: &[&str] = &[
    "Пантеизм",
    "Секулярный гуманизм",
    "Деизм",
    "Атеизм",
    "Иудаизм",
    "Католицизм",
    "Конфуцианство",
    "Агностицизм",
    "Буддизм",
];

/// Occupations that are well-formed but never accepted.
pub static OCCUPATION_BLOCKLIST: &[&str] = &[
    "Рыцарь смерти",
    "Воин",
    "Друид",
    "Шаман",
    "Жрец",
    "Паладин",
    "Маг",
    "Охотник на демонов",
    "Чернокнижник",
    "Разбойник",
    "Монах",
];
