/// "Cat Facts" in the figlet Small font
pub const BANNER: &str = r"  ___      _     ___        _
 / __|__ _| |_  | __|_ _ __| |_ ___
| (__/ _` |  _| | _/ _` / _|  _(_-<
 \___\__,_|\__| |_|\__,_\__|\__/__/";

pub const CAT_ART: &str = r"
    \
     \
       /\_/\
      ( o.o )
       > ^ <
      /|   |\
     (_|   |_)";

/// Width of the divider printed between facts
pub const DIVIDER_WIDTH: usize = 54;

pub fn divider() -> String {
    format!("\n{}\n", "~".repeat(DIVIDER_WIDTH))
}
