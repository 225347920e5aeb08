//! Hebrew UI copy.
//!
//! The product ships a single right-to-left locale; keeping every string here
//! lets pages stay free of literals and lets tests assert on exact wording.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

pub const APP_TITLE: &str = "🦒 Giraffe Kitchen";
pub const DASHBOARD_TITLE: &str = "🦒 מערכת ניהול מטבח";

pub const USERNAME_PLACEHOLDER: &str = "שם משתמש";
pub const PASSWORD_PLACEHOLDER: &str = "סיסמה";
pub const LOGIN_BUTTON: &str = "התחבר";
pub const LOGIN_BUTTON_BUSY: &str = "מתחבר...";
pub const LOGIN_FAILED: &str = "שגיאה בהתחברות";
pub const FIELDS_REQUIRED: &str = "יש למלא שם משתמש וסיסמה";

pub const DEMO_HQ_LABEL: &str = "מטה:";
pub const DEMO_HQ_CREDENTIALS: &str = "headquarters / admin123";
pub const DEMO_RESTAURANT_LABEL: &str = "מסעדה:";
pub const DEMO_RESTAURANT_CREDENTIALS: &str = "haifa_user / haifa123";

pub const LOADING: &str = "טוען נתונים...";
pub const LOGOUT: &str = "יציאה";
pub const RETRY: &str = "נסה שוב";
pub const RESTAURANTS_FAILED: &str = "שגיאה בטעינת המסעדות";
pub const NO_RESTAURANTS: &str = "אין מסעדות להצגה";
pub const DETAILS_HINT: &str = "לחץ לפרטים נוספים ←";
pub const RESTAURANT_NOT_FOUND: &str = "מסעדה לא נמצאה";
pub const BACK_TO_DASHBOARD: &str = "→ חזרה ללוח הבקרה";
pub const LOCATION_LABEL: &str = "מיקום:";

pub const ACTIVE: &str = "✅ פעיל";
pub const INACTIVE: &str = "❌ לא פעיל";

pub const USER_TYPE_HQ: &str = "מטה";
pub const USER_TYPE_RESTAURANT: &str = "מסעדה";

/// "Status: ..." line for a restaurant card.
pub fn status_line(is_active: bool) -> String {
    format!("סטטוס: {}", if is_active { ACTIVE } else { INACTIVE })
}

/// "ID: ..." line for a restaurant card.
pub fn id_line(id: &str) -> String {
    format!("מזהה: {id}")
}
