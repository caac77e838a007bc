//! Material constants
//!
//! Fixed physical constants for the two solver variants, in the cm-based unit
//! system the closed-form depletion equations are written in:
//!
//! - charge in Coulomb, permittivity in F/cm
//! - energies in eV, temperatures in Kelvin
//! - concentrations in cm⁻³, lengths in cm internally, nm at the API boundary
//!
//! Constants are value records with `const fn` defaults; they are not user
//! input. A caller studying a different material builds its own record.

// =================================================================================================
// Unit Conversions
// =================================================================================================

/// Converts a length in cm to nm.
pub const CM_TO_NM: f64 = 1.0e7;

/// Converts a density of states from m⁻³ to cm⁻³.
pub const M3_TO_CM3: f64 = 1.0e-6;

/// Converts a curvature in V/cm² to V/nm² (1 cm = 1e7 nm, squared).
pub const PER_NM2: f64 = 1.0e-14;

// =================================================================================================
// Homojunction Constants
// =================================================================================================

/// Material constants for the fully ionized p-n homojunction solver
///
/// Defaults describe silicon at 300 K. All concentrations are in cm⁻³ and the
/// permittivities in F/cm, so the depletion-width formula yields cm directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialConstants {
    /// Elementary charge q [C]
    pub elementary_charge: f64,

    /// Boltzmann constant [eV/K]
    pub boltzmann_ev: f64,

    /// Permittivity of free space ε₀ [F/cm]
    pub vacuum_permittivity: f64,

    /// Relative permittivity ε_r (dimensionless)
    pub relative_permittivity: f64,

    /// Bandgap E_g [eV]
    pub bandgap: f64,

    /// Intrinsic carrier concentration n_i [cm⁻³]
    pub intrinsic_concentration: f64,

    /// Lattice temperature T [K]
    pub temperature: f64,
}

impl MaterialConstants {
    /// Silicon at 300 K.
    pub const fn silicon() -> Self {
        Self {
            elementary_charge: 1.602e-19,
            boltzmann_ev: 8.617e-5,
            vacuum_permittivity: 8.854e-14,
            relative_permittivity: 11.7,
            bandgap: 1.12,
            intrinsic_concentration: 1.5e10,
            temperature: 300.0,
        }
    }

    /// Material permittivity ε = ε₀·ε_r [F/cm].
    #[inline]
    pub fn permittivity(&self) -> f64 {
        self.vacuum_permittivity * self.relative_permittivity
    }

    /// Thermal voltage kT [eV] at the configured temperature.
    #[inline]
    pub fn thermal_voltage(&self) -> f64 {
        self.boltzmann_ev * self.temperature
    }
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self::silicon()
    }
}

// =================================================================================================
// Schottky Constants
// =================================================================================================

/// Material constants for the Schottky (incomplete ionization) solver
///
/// On top of the electrostatic constants, the incomplete-ionization equation
/// needs the hole effective mass (to build the effective valence density of
/// states at an arbitrary temperature), the acceptor degeneracy factor, and
/// the doping-dependent ionization energy `Ea = Ea₀ − c·Na^(1/3)`.
///
/// Defaults describe boron-doped silicon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchottkyConstants {
    /// Elementary charge q [C]
    pub elementary_charge: f64,

    /// Boltzmann constant [eV/K]
    pub boltzmann_ev: f64,

    /// Boltzmann constant [J/K]
    pub boltzmann_j: f64,

    /// Planck constant h [J·s]
    pub planck: f64,

    /// Free electron mass m₀ [kg]
    pub electron_mass: f64,

    /// Permittivity of free space ε₀ [F/cm]
    pub vacuum_permittivity: f64,

    /// Relative permittivity ε_r (dimensionless)
    pub relative_permittivity: f64,

    /// Bandgap E_g [eV]
    pub bandgap: f64,

    /// Hole density-of-states effective mass ratio m*/m₀ (dimensionless)
    pub hole_mass_ratio: f64,

    /// Acceptor level degeneracy factor g (dimensionless)
    pub acceptor_degeneracy: f64,

    /// Ionization energy of the isolated acceptor Ea₀ [eV]
    pub ionization_energy_0: f64,

    /// Doping-dependence coefficient c in Ea = Ea₀ − c·Na^(1/3) [eV·cm]
    pub ionization_coefficient: f64,
}

impl SchottkyConstants {
    /// Boron-doped silicon.
    pub const fn silicon_boron() -> Self {
        Self {
            elementary_charge: 1.602e-19,
            boltzmann_ev: 8.617e-5,
            boltzmann_j: 1.381e-23,
            planck: 6.626e-34,
            electron_mass: 9.109e-31,
            vacuum_permittivity: 8.854e-14,
            relative_permittivity: 11.7,
            bandgap: 1.12,
            hole_mass_ratio: 0.81,
            acceptor_degeneracy: 4.0,
            ionization_energy_0: 0.045,
            ionization_coefficient: 4.3e-8,
        }
    }

    /// Material permittivity ε = ε₀·ε_r [F/cm].
    #[inline]
    pub fn permittivity(&self) -> f64 {
        self.vacuum_permittivity * self.relative_permittivity
    }

    /// Thermal voltage kT [eV] at `temperature` [K].
    #[inline]
    pub fn thermal_voltage(&self, temperature: f64) -> f64 {
        self.boltzmann_ev * temperature
    }

    /// Effective valence density of states Nv [cm⁻³] at `temperature` [K].
    ///
    /// Standard statistical-mechanics form evaluated in SI, then converted to
    /// the cm-based system the charge-neutrality equation uses:
    ///
    /// ```text
    /// Nv = 2·(2π·m*·k_B·T / h²)^(3/2)   [m⁻³]  →  × 1e-6  [cm⁻³]
    /// ```
    pub fn valence_dos(&self, temperature: f64) -> f64 {
        let effective_mass = self.hole_mass_ratio * self.electron_mass;
        let base = 2.0 * std::f64::consts::PI * effective_mass * self.boltzmann_j * temperature
            / (self.planck * self.planck);
        2.0 * base.powf(1.5) * M3_TO_CM3
    }

    /// Doping-dependent acceptor ionization energy Ea = Ea₀ − c·Na^(1/3) [eV].
    #[inline]
    pub fn ionization_energy(&self, acceptor_concentration: f64) -> f64 {
        self.ionization_energy_0 - self.ionization_coefficient * acceptor_concentration.cbrt()
    }
}

impl Default for SchottkyConstants {
    fn default() -> Self {
        Self::silicon_boron()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_silicon_thermal_voltage() {
        let si = MaterialConstants::silicon();
        // kT = 8.617e-5 · 300 = 0.025851 eV
        assert_relative_eq!(si.thermal_voltage(), 0.025851, epsilon = 1e-9);
    }

    #[test]
    fn test_silicon_permittivity() {
        let si = MaterialConstants::silicon();
        // ε = 11.7 · 8.854e-14 ≈ 1.036e-12 F/cm
        assert_relative_eq!(si.permittivity(), 1.0359e-12, max_relative = 1e-3);
    }

    #[test]
    fn test_valence_dos_room_temperature() {
        let si = SchottkyConstants::silicon_boron();
        // With m*/m₀ = 0.81 at 300 K, Nv ≈ 1.83e19 cm⁻³ — the right order for
        // silicon's effective valence density of states.
        let nv = si.valence_dos(300.0);
        assert_relative_eq!(nv, 1.83e19, max_relative = 0.01);
    }

    #[test]
    fn test_valence_dos_scales_with_temperature() {
        let si = SchottkyConstants::silicon_boron();
        // Nv ∝ T^(3/2), so doubling T multiplies Nv by 2^1.5.
        let ratio = si.valence_dos(600.0) / si.valence_dos(300.0);
        assert_relative_eq!(ratio, 2.0_f64.powf(1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_ionization_energy_shrinks_with_doping() {
        let si = SchottkyConstants::silicon_boron();
        let dilute = si.ionization_energy(1e14);
        let heavy = si.ionization_energy(1e18);
        assert!(dilute > heavy, "Ea must decrease with doping");
        assert_relative_eq!(si.ionization_energy(0.0), 0.045, epsilon = 1e-12);
    }
}
