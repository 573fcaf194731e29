use anchor_lang::prelude::*;

use crate::constants::MAX_OPERATORS;
use crate::error::{DistributionError, DistributionResult};

/// Admin plus a bounded operator set. The admin is fixed at initialization.
///
/// Only the first `operator_count` slots of `operators` are members; the rest
/// are zeroed padding and never match a caller.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessControl {
    pub admin: Pubkey,
    pub operator_count: u8,
    pub operators: [Pubkey; MAX_OPERATORS],
}

impl AccessControl {
    pub const SIZE: usize =
        32 +                  // admin
        1 +                   // operator_count
        32 * MAX_OPERATORS;   // operators

    pub fn new(admin: Pubkey) -> DistributionResult<Self> {
        if admin == Pubkey::default() {
            return Err(DistributionError::InvalidAdmin);
        }
        Ok(Self {
            admin,
            operator_count: 0,
            operators: [Pubkey::default(); MAX_OPERATORS],
        })
    }

    pub fn members(&self) -> &[Pubkey] {
        &self.operators[..self.operator_count as usize]
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn is_operator(&self, caller: &Pubkey) -> bool {
        self.members().contains(caller)
    }

    pub fn require_admin(&self, caller: &Pubkey) -> DistributionResult<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(DistributionError::Unauthorized)
        }
    }

    pub fn require_operator(&self, caller: &Pubkey) -> DistributionResult<()> {
        if self.is_operator(caller) {
            Ok(())
        } else {
            Err(DistributionError::Unauthorized)
        }
    }

    /// Returns `false` when `operator` was already a member.
    pub fn add_operator(&mut self, operator: Pubkey) -> DistributionResult<bool> {
        if operator == Pubkey::default() {
            return Err(DistributionError::InvalidOperator);
        }
        if self.is_operator(&operator) {
            return Ok(false);
        }
        let idx = self.operator_count as usize;
        if idx >= MAX_OPERATORS {
            return Err(DistributionError::OperatorSetFull);
        }
        self.operators[idx] = operator;
        self.operator_count += 1;
        Ok(true)
    }

    /// Returns `false` when `operator` was not a member. Remaining members keep
    /// their relative order.
    pub fn remove_operator(&mut self, operator: &Pubkey) -> bool {
        let count = self.operator_count as usize;
        let Some(pos) = self.members().iter().position(|m| m == operator) else {
            return false;
        };
        self.operators.copy_within(pos + 1..count, pos);
        self.operators[count - 1] = Pubkey::default();
        self.operator_count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn admin_is_fixed_and_checked() {
        let ac = AccessControl::new(key(1)).unwrap();
        assert!(ac.is_admin(&key(1)));
        assert!(!ac.is_admin(&key(2)));
        assert!(ac.require_admin(&key(1)).is_ok());
        assert!(matches!(
            ac.require_admin(&key(2)),
            Err(DistributionError::Unauthorized)
        ));
    }

    #[test]
    fn zero_admin_is_rejected() {
        assert!(matches!(
            AccessControl::new(Pubkey::default()),
            Err(DistributionError::InvalidAdmin)
        ));
    }

    #[test]
    fn empty_set_authorizes_nobody() {
        let ac = AccessControl::new(key(1)).unwrap();
        // The admin is not implicitly an operator, and padding never matches.
        assert!(!ac.is_operator(&key(1)));
        assert!(!ac.is_operator(&Pubkey::default()));
        assert!(matches!(
            ac.require_operator(&key(2)),
            Err(DistributionError::Unauthorized)
        ));
    }

    #[test]
    fn add_operator_is_idempotent() {
        let mut ac = AccessControl::new(key(1)).unwrap();
        assert!(ac.add_operator(key(2)).unwrap());
        assert!(!ac.add_operator(key(2)).unwrap());
        assert_eq!(ac.members(), &[key(2)]);
        assert!(ac.require_operator(&key(2)).is_ok());
    }

    #[test]
    fn add_zero_operator_is_rejected() {
        let mut ac = AccessControl::new(key(1)).unwrap();
        assert!(matches!(
            ac.add_operator(Pubkey::default()),
            Err(DistributionError::InvalidOperator)
        ));
        assert_eq!(ac.operator_count, 0);
    }

    #[test]
    fn operator_set_is_bounded() {
        let mut ac = AccessControl::new(key(1)).unwrap();
        for n in 0..MAX_OPERATORS as u8 {
            ac.add_operator(key(100 + n)).unwrap();
        }
        assert!(matches!(
            ac.add_operator(key(250)),
            Err(DistributionError::OperatorSetFull)
        ));
        // Re-adding an existing member still succeeds when full.
        assert!(!ac.add_operator(key(100)).unwrap());
    }

    #[test]
    fn remove_operator_keeps_order_and_ignores_non_members() {
        let mut ac = AccessControl::new(key(1)).unwrap();
        for n in 2..=5 {
            ac.add_operator(key(n)).unwrap();
        }
        assert!(ac.remove_operator(&key(3)));
        assert_eq!(ac.members(), &[key(2), key(4), key(5)]);
        assert!(!ac.is_operator(&key(3)));

        assert!(!ac.remove_operator(&key(3)));
        assert!(!ac.remove_operator(&key(9)));
        assert_eq!(ac.operator_count, 3);

        assert!(ac.remove_operator(&key(5)));
        assert_eq!(ac.members(), &[key(2), key(4)]);
        assert_eq!(ac.operators[2], Pubkey::default());
    }
}
