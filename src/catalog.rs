use phf::OrderedMap;

/// Relative directory the language files live in.
pub const LANG_DIR: &str = "neuro-core/neuro_core/config/langs";

/// Top-level sections that may carry the tooltip string.
pub const SECTION_KEYS: [&str; 2] = ["neurobase_main_window", "neurocore_main_window"];

/// The nested key this tool overwrites.
pub const TOOLTIP_KEY: &str = "tooltip_menu_button";

/// Translations of "User Profile Button" keyed by language file name.
/// Files are processed in declaration order.
pub static TRANSLATIONS: OrderedMap<&'static str, &'static str> = phf::phf_ordered_map! {
    "ar.json" => "زر الملف الشخصي للمستخدم - انقر علي! 📋",
    "bn.json" => "ব্যবহারকারী প্রোফাইল বোতাম - আমাকে ক্লিক করুন! 📋",
    "hi.json" => "उपयोगकर्ता प्रोफ़ाइल बटन - मुझे क्लिक करें! 📋",
    "ja.json" => "ユーザープロフィールボタン - クリックしてください！📋",
    "ko.json" => "사용자 프로필 버튼 - 클릭하세요! 📋",
    "pa.json" => "ਯੂਜ਼ਰ ਪ੍ਰੋਫਾਈਲ ਬਟਨ - ਮੈਨੂੰ ਕਲਿਕ ਕਰੋ! 📋",
    "pt.json" => "Botão Perfil do Usuário - Clique em mim! 📋",
    "ru.json" => "Кнопка Профиль Пользователя - Нажмите на меня! 📋",
    "tr.json" => "Kullanıcı Profili Düğmesi - Bana tıklayın! 📋",
    "uk.json" => "Кнопка Профіль Користувача - Натисніть мене! 📋",
    "zh.json" => "用户配置文件按钮 - 点击我！📋",
};
