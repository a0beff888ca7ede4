use crate::platform::NavigationTarget;

/// Fixed mapping from device manufacturer to that vendor's autostart
/// management screen. Built once and owned by the command processor.
pub struct VendorTable {
    entries: Vec<(&'static str, NavigationTarget)>,
}

impl VendorTable {
    pub fn new() -> Self {
        let entries = vec![
            (
                "xiaomi",
                NavigationTarget::new(
                    "com.miui.securitycenter",
                    "com.miui.permcenter.autostart.AutoStartManagementActivity",
                ),
            ),
            (
                "oppo",
                NavigationTarget::new(
                    "com.coloros.safecenter",
                    "com.coloros.safecenter.permission.startup.StartupAppListActivity",
                ),
            ),
            (
                "vivo",
                NavigationTarget::new(
                    "com.vivo.permissionmanager",
                    "com.vivo.permissionmanager.activity.BgStartUpManagerActivity",
                ),
            ),
            (
                "Letv",
                NavigationTarget::new(
                    "com.letv.android.letvsafe",
                    "com.letv.android.letvsafe.AutobootManageActivity",
                ),
            ),
            (
                "Honor",
                NavigationTarget::new(
                    "com.huawei.systemmanager",
                    "com.huawei.systemmanager.optimize.process.ProtectActivity",
                ),
            ),
            (
                "samsung",
                NavigationTarget::new(
                    "com.samsung.android.lool",
                    "com.samsung.android.sm.ui.battery.BatteryActivity",
                ),
            ),
            (
                "oneplus",
                NavigationTarget::new(
                    "com.oneplus.security",
                    "com.oneplus.security.chainlaunch.view.ChainLaunchAppListActivity",
                ),
            ),
            (
                "nokia",
                NavigationTarget::new(
                    "com.evenwell.powersaving.g3",
                    "com.evenwell.powersaving.g3.exception.PowerSaverExceptionActivity",
                ),
            ),
            (
                "asus",
                NavigationTarget::new(
                    "com.asus.mobilemanager",
                    "com.asus.mobilemanager.autostart.AutoStartActivy",
                ),
            ),
        ];
        Self { entries }
    }

    /// Case-insensitive lookup. No trimming or locale folding; vendor build
    /// strings differ only by ASCII case in practice.
    pub fn lookup(&self, manufacturer: &str) -> Option<&NavigationTarget> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(manufacturer))
            .map(|(_, target)| target)
    }

    pub fn is_supported(&self, manufacturer: &str) -> bool {
        self.lookup(manufacturer).is_some()
    }

    /// The manufacturer keys this table knows a screen for.
    pub fn manufacturers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl Default for VendorTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_for_every_key() {
        let table = VendorTable::new();
        for key in [
            "xiaomi", "oppo", "vivo", "Letv", "Honor", "samsung", "oneplus", "nokia", "asus",
        ] {
            assert!(table.is_supported(key), "{key} should be supported");
            assert!(table.is_supported(&key.to_ascii_uppercase()));
            assert!(table.is_supported(&key.to_ascii_lowercase()));
            assert_eq!(
                table.lookup(key),
                table.lookup(&key.to_ascii_uppercase()),
                "casing of {key} must not change the target"
            );
        }
    }

    #[test]
    fn lookup_returns_exact_targets() {
        let table = VendorTable::new();
        let expected = [
            (
                "xiaomi",
                "com.miui.securitycenter",
                "com.miui.permcenter.autostart.AutoStartManagementActivity",
            ),
            (
                "oppo",
                "com.coloros.safecenter",
                "com.coloros.safecenter.permission.startup.StartupAppListActivity",
            ),
            (
                "vivo",
                "com.vivo.permissionmanager",
                "com.vivo.permissionmanager.activity.BgStartUpManagerActivity",
            ),
            (
                "letv",
                "com.letv.android.letvsafe",
                "com.letv.android.letvsafe.AutobootManageActivity",
            ),
            (
                "honor",
                "com.huawei.systemmanager",
                "com.huawei.systemmanager.optimize.process.ProtectActivity",
            ),
            (
                "samsung",
                "com.samsung.android.lool",
                "com.samsung.android.sm.ui.battery.BatteryActivity",
            ),
            (
                "oneplus",
                "com.oneplus.security",
                "com.oneplus.security.chainlaunch.view.ChainLaunchAppListActivity",
            ),
            (
                "nokia",
                "com.evenwell.powersaving.g3",
                "com.evenwell.powersaving.g3.exception.PowerSaverExceptionActivity",
            ),
            (
                "asus",
                "com.asus.mobilemanager",
                "com.asus.mobilemanager.autostart.AutoStartActivy",
            ),
        ];
        for (key, package, class) in expected {
            let target = table.lookup(key).expect("known manufacturer");
            assert_eq!(target.package, package);
            assert_eq!(target.class, class);
        }
    }

    #[test]
    fn unknown_manufacturers_have_no_target() {
        let table = VendorTable::new();
        for key in ["pixel", "", "xiaomi ", " samsung", "huawei"] {
            assert!(!table.is_supported(key), "{key:?} should be unsupported");
            assert!(table.lookup(key).is_none());
        }
    }

    #[test]
    fn manufacturers_stays_consistent_with_lookup() {
        let table = VendorTable::new();
        let keys: Vec<&str> = table.manufacturers().collect();
        assert_eq!(keys.len(), 9);
        for key in keys {
            assert!(table.is_supported(key));
        }
    }

    #[test]
    fn table_entries_have_non_empty_locators() {
        let table = VendorTable::new();
        for key in table.manufacturers() {
            let target = table.lookup(key).expect("known manufacturer");
            assert!(!target.package.is_empty());
            assert!(!target.class.is_empty());
        }
    }
}
