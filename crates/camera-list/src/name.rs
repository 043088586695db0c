/// Prefix shared by every camera prim in the recorder scene.
pub const BASE_PATH: &str = "/World/Cams_01/";

/// Returns the prim path of the camera in slot `index` under [`BASE_PATH`].
pub fn camera_name(index: i64) -> String {
    camera_name_in(BASE_PATH, index)
}

/// Returns the prim path of the camera in slot `index` under `base_path`.
///
/// Slot 0 is the unsuffixed `Camera`; every other slot gets a two-digit
/// suffix. Indices outside 0..100 are not rejected, they just don't pad
/// cleanly.
pub fn camera_name_in(base_path: &str, index: i64) -> String {
    if index == 0 {
        format!("{}Camera", base_path)
    } else {
        format!("{}Camera_{:02}", base_path, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_has_no_suffix() {
        assert_eq!(camera_name(0), "/World/Cams_01/Camera");
    }

    #[test]
    fn later_slots_are_zero_padded() {
        assert_eq!(camera_name(3), "/World/Cams_01/Camera_03");
        assert_eq!(camera_name(12), "/World/Cams_01/Camera_12");

        for i in 1..50 {
            assert_eq!(
                camera_name(i),
                format!("/World/Cams_01/Camera_{:0>2}", i.to_string())
            );
        }
    }

    #[test]
    fn out_of_range_indices_pass_through() {
        assert_eq!(camera_name(100), "/World/Cams_01/Camera_100");
        assert_eq!(camera_name(-3), "/World/Cams_01/Camera_-3");
    }

    #[test]
    fn custom_base_path() {
        assert_eq!(camera_name_in("/World/Cams_02/", 7), "/World/Cams_02/Camera_07");
        assert_eq!(camera_name_in("", 0), "Camera");
    }
}
